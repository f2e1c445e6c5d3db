/// The interactive side of a launch: printing text and reading answers.
pub trait Console {
    fn print(&self, text: &str);

    /// Show `prompt` and read one line without its line ending.
    ///
    /// `None` means the input was closed.
    fn read_line(&self, prompt: &str) -> anyhow::Result<Option<String>>;
}
