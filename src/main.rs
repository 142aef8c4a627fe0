use derive_more::Display;
use raytrace::logger::{self, ProjectError};
use raytrace::maths::Vector3D;
use raytrace::project;
use std::process::ExitCode;

#[derive(Debug, Display, PartialEq)]
enum CliError
{
    #[display("{program} takes no arguments.")]
    UnexpectedArguments { program: String },
}

impl std::error::Error for CliError {}

impl ProjectError for CliError
{
    fn title(&self) -> String { String::from("Usage") }

    /// Usage complaints go to stdout, not the logger
    fn handle(&self) { println!("{}", self); }
}

fn check_arguments(mut args: impl Iterator<Item = String>) -> Result<(), CliError>
{
    let program = args.next().unwrap_or_else(|| String::from(project::PROJECT_NAME));
    if args.next().is_some() {
        return Err(CliError::UnexpectedArguments { program });
    }
    Ok(())
}

fn main() -> ExitCode
{
    logger::init();
    log::debug!("{} v{}.{}", project::PROJECT_NAME, project::VERSION_MAJOR, project::VERSION_MINOR);

    if let Err(err) = check_arguments(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned())) {
        err.handle();
        return ExitCode::FAILURE;
    }

    println!("This is project {}.", project::PROJECT_NAME);

    let vector = Vector3D::new([1., 2., 3.]);
    println!("{}", vector);

    ExitCode::SUCCESS
}
