use timeline::{commands::Cli, libs::logging::init_logging};

fn main() -> anyhow::Result<()> {
    init_logging();
    Cli::menu()
}
