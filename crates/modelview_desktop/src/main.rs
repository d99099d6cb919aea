use clap::Parser;
use modelview_desktop::{Args, Error, Launcher, WinitRunLoop};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    Launcher::new(args.config()).launch(args.model, &mut WinitRunLoop)
}
