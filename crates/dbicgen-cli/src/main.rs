use anyhow::Result;

fn main() -> Result<()> {
    dbicgen_cli::parse_and_run()
}
