pub struct Config;

impl Config {
    /// Panic message for `unwrap` on `Empty`.
    pub const UNWRAP_EMPTY_MSG: &'static str = "called `unwrap` on an empty Optional";
    pub const UNWRAP_UNSAFE_MSG: &'static str = "called `unwrap_unsafe` on an empty Optional";

    pub const EMPTY_DISPLAY: &'static str = "<empty>";
    pub const NON_STRING_PANIC: &'static str = "<non-string panic payload>";
}
