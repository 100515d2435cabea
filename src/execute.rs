use anyhow::Result;
use colored::Colorize;
use gobrew::{Gobrew, InstallOutcome, SwitchOutcome};
use crate::cli::{GobrewCommand, CLI};

pub fn execute(cli: CLI) -> Result<()> {
    let gobrew = Gobrew::from_env()?;
    match cli.command {
        GobrewCommand::Ls => {
            execute_ls(&gobrew)
        }
        GobrewCommand::LsRemote => {
            execute_ls_remote(&gobrew)
        }
        GobrewCommand::Install { version } => {
            execute_install(&gobrew, &version)
        }
        GobrewCommand::Use { version } => {
            execute_use(&gobrew, &version)
        }
        GobrewCommand::Uninstall { version } => {
            execute_uninstall(&gobrew, &version)
        }
        GobrewCommand::Current => {
            execute_current(&gobrew)
        }
    }
}

pub fn execute_ls(gobrew: &Gobrew) -> Result<()> {
    let versions = gobrew.list_versions()?;
    let mut current = None;
    for installed in &versions {
        if installed.current {
            println!("{}", format!("{}*", installed.version).green());
            current = Some(installed.version.as_str());
        } else {
            println!("{}", installed.version);
        }
    }
    if let Some(current) = current {
        println!();
        println!("current: {}", current);
    }
    Ok(())
}

pub fn execute_ls_remote(gobrew: &Gobrew) -> Result<()> {
    for version in gobrew.list_remote_versions()? {
        println!("{}", version);
    }
    Ok(())
}

pub fn execute_install(gobrew: &Gobrew, version: &str) -> Result<()> {
    match gobrew.install(version)? {
        InstallOutcome::Installed => {
            println!("{} Installed version: {}", "[Success]".green(), version);
        }
        InstallOutcome::AlreadyInstalled => {
            println!("{} Version: {} exists", "[Info]".cyan(), version);
        }
    }
    Ok(())
}

pub fn execute_use(gobrew: &Gobrew, version: &str) -> Result<()> {
    match gobrew.use_version(version)? {
        SwitchOutcome::Switched => {
            println!("{} Changed go version to: {}", "[Success]".green(), version);
        }
        SwitchOutcome::AlreadyCurrent => {
            println!("{} Version: {} is already your current version", "[Info]".cyan(), version);
        }
    }
    Ok(())
}

pub fn execute_uninstall(gobrew: &Gobrew, version: &str) -> Result<()> {
    gobrew.uninstall(version)?;
    println!("{} Version: {} uninstalled", "[Success]".green(), version);
    Ok(())
}

pub fn execute_current(gobrew: &Gobrew) -> Result<()> {
    if let Some(version) = gobrew.current_version() {
        println!("{}", version);
    }
    Ok(())
}
