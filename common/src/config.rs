pub struct Config {
    /// Suppresses the startup banner.
    pub no_banner: bool,
    /// Disables colored output entirely.
    pub plain: bool,
    /// Output reduction level.
    ///
    /// `0` prints everything, `1` drops banner and decoration.
    pub quiet: u8,
}
