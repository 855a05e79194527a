use anyhow::Result;
use clap::Parser;
use gcm_utils::{cli, commands, env};

pub fn main() -> Result<()> {
    env::init_console_subscriber();
    let args = cli::Commands::parse();
    match args {
        cli::Commands::ToBits(args) => println!("{}", commands::to_bits(args)),
        cli::Commands::FromBits(args) => println!("{}", commands::from_bits(args)?),
        cli::Commands::Reverse(args) => println!("{}", commands::reverse(args)),
        cli::Commands::ParseBe(args) => println!("{}", commands::parse_be(args)?),
        cli::Commands::ParseLe(args) => println!("{}", commands::parse_le(args)?),
        cli::Commands::Increment(args) => commands::increment(args)?
            .iter()
            .for_each(|block| println!("{block}")),
        cli::Commands::Xor(args) => println!("{}", commands::xor(args)?),
        cli::Commands::Mux(args) => println!("{}", commands::mux(args)?),
        cli::Commands::Select(args) => println!("{}", commands::select_row(args)?),
    }
    Ok(())
}
