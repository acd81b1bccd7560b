fn main() -> anyhow::Result<()> {
    cloze_terms::run()
}
