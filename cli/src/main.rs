use std::{env, fs, process};

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Please provide a path");
            process::exit(2);
        }
    };

    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Could not read {}: {}", path, e);
            process::exit(2);
        }
    };

    match commented_json::parse(&json) {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("{}: {}", path, e);
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("{}: {}", path, e);
            process::exit(1);
        }
    }
}
