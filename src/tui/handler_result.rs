#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyHandlerResult {
    NotHandled,
    Handled,
    ShouldQuit,
}
