mod command;
mod input;
mod render;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
