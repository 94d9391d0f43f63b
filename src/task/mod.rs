pub mod dns;
pub mod output;

pub trait Task {
    fn name(&self) -> &str;
    fn run(&self) -> anyhow::Result<()>;
}
