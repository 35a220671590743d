fn main() -> anyhow::Result<()> {
    aviator::flow::run()
}
