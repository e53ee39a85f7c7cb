use colored::*;
use rand;

const BANNER_0: &str = r#"
   ___ ____   ____     _    ____ _____
  |_ _|  _ \ / ___|   / \  / ___|_   _|
   | || |_) | |      / _ \ \___ \ | |
   | ||  __/| |___  / ___ \ ___) || |
  |___|_|    \____|/_/   \_\____/ |_|
"#;

const BANNER_1: &str = r#"
  ██╗██████╗  ██████╗ █████╗ ███████╗████████╗
  ██║██╔══██╗██╔════╝██╔══██╗██╔════╝╚══██╔══╝
  ██║██████╔╝██║     ███████║███████╗   ██║
  ██║██╔═══╝ ██║     ██╔══██║╚════██║   ██║
  ██║██║     ╚██████╗██║  ██║███████║   ██║
  ╚═╝╚═╝      ╚═════╝╚═╝  ╚═╝╚══════╝   ╚═╝
"#;

const BANNER_2: &str = r#"
   _                  _
  (_)_ __  __ __ _ __| |_
  | | '_ \/ _/ _` (_-<  _|
  |_| .__/\__\__,_/__/\__|
    |_|
"#;

pub fn print() {
    let n: u8 = rand::random_range(0..=2);
    match n {
        0 => println!("{}", BANNER_0.bright_cyan()),
        1 => println!("{}", BANNER_1.truecolor(255, 165, 0)),
        _ => println!("{}", BANNER_2.green()),
    }
}
