use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "ipcast")]
#[command(about = "Convert an IPv4 address between all of its notations.")]
pub struct CommandLine {
    /// Address to convert: dotted-quad, partial dotted form, plain
    /// decimal, hex ("0x...") or octal ("0o...", leading zero)
    pub address: String,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Reduce decoration around the report
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
