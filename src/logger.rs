use log::LevelFilter;

/// Installs the stderr logger used by the binary.
///
/// Only warnings and errors are shown, and the environment is not consulted, so stdout stays reserved for program
/// output.
pub fn init()
{
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .format_timestamp(None)
        .try_init();
}

pub trait ProjectError: std::error::Error
{
    fn title(&self) -> String;

    /// Function for default handling an error
    ///
    /// Logs the error with its title through the installed logger
    fn handle(&self) { log::error!("[{} Error] {}", self.title(), self); }
}
