use getopts::Options;
use std::env;
use std::io::{self, BufRead};
use std::process::exit;

use dhcpv6_wire::wire::{DomainNames, Dhcpv6Packet, Fqdn, PrettyPrinter};

#[derive(Debug, Clone, Copy)]
enum Input {
    Packet,
    DomainList,
    Fqdn,
}

fn dump(input: Input, line: &str) -> Result<(), String> {
    let data = hex::decode(line.trim()).map_err(|err| format!("{line}: {err}"))?;
    match input {
        Input::Packet => {
            println!("{}", PrettyPrinter::<Dhcpv6Packet<&[u8]>>::new("", &data));
        }
        Input::DomainList => match DomainNames::parse(&data) {
            Ok(names) => println!("{names}"),
            Err(err) => println!("domain-list ({err})"),
        },
        Input::Fqdn => match Fqdn::parse(&data) {
            Ok(fqdn) => println!("fqdn={fqdn}"),
            Err(err) => println!("fqdn ({err})"),
        },
    }
    Ok(())
}

fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {program} [options] [HEX...]");
    print!("{}", opts.usage(&brief));
    println!();
    println!("Decodes each hex-encoded argument, or each line of standard input when");
    println!("no argument is given.");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optflag("d", "domain-list", "decode Domain Search List option values");
    opts.optflag("f", "fqdn", "decode Client FQDN option values");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    if matches.opt_present("h") {
        print_usage(&program, opts);
        return;
    }

    let input = match (matches.opt_present("d"), matches.opt_present("f")) {
        (false, false) => Input::Packet,
        (true, false) => Input::DomainList,
        (false, true) => Input::Fqdn,
        (true, true) => {
            eprintln!("--domain-list and --fqdn are mutually exclusive");
            exit(1)
        }
    };

    let mut failed = false;
    let mut run = |line: &str| {
        if let Err(err) = dump(input, line) {
            eprintln!("{err}");
            failed = true;
        }
    };

    if matches.free.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => run(&line),
                Err(err) => {
                    eprintln!("{err}");
                    exit(1)
                }
            }
        }
    } else {
        for arg in matches.free.iter() {
            run(arg);
        }
    }

    if failed {
        exit(1)
    }
}
