use gildedrose_shop::{CommandLine, run};

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let cli = CommandLine::parse_args();
    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}
