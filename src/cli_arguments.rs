use clap::{Parser, command};

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArguments {
    #[arg(short, long)]
    pub port: u16,
}
