//! Usage text

use colored::Colorize;

/// Full usage text with the command catalog
pub fn help_text() -> String {
    format!(
        r#"{title}

{syntax}
mk <command> [arguments]

{commands}

{setup}
{init}
                Initializes or renames the project.
                    -- removes the existing Git history
                    -- installs the dependencies
                    -- renames package.json and go.mod
                    -- rewrites the Go imports
                    -- renames the project directory
                    -- initializes a new Git repository
                    -- creates the initial commit

{fork}
                Same as {init_ref}, but sets up a fork of the current project.
                    -- performs the same setup steps as init
                    -- renames the origin remote to upstream
                    -- keeps the history of the original repository

{merge}
                Syncs the project with the upstream repository.
                    -- fetches the latest changes of the original repository
                    -- merges them into the current branch

{assets}
{dev}
                Compiles the assets for development into public/.
                    -- copies the CSS as is
                    -- bundles TS/JS with inline source maps
                    -- {watch} recompiles when a source changes

{build}
                Compiles the assets for production into dist/public/.
                    -- minifies the CSS
                    -- bundles and minifies TS/JS without source maps

{info}
{help}      Shows this help
{version}   Shows the version

{project_name}
                {rules}:
                    -- format: gitUser/projectName
                    -- letters, digits, dot, dash and underscore only, no spaces
                    -- projectName becomes the package.json name and the directory name
                    -- gitUser/projectName becomes the Go module path
                      Ex: {example}
                          -- package.json: widget
                          -- go.mod:       module acme/widget
                          -- imports:      acme/widget/internal/...
                          -- directory:    ../widget
"#,
        title = "mk is the assistant for the project".bold().cyan(),
        syntax = "syntax:".bold(),
        commands = "Available commands:".bold(),
        setup = "=== project setup ===".magenta(),
        init = "init".green(),
        init_ref = "init".green(),
        fork = "init fork".green(),
        merge = "merge upstream".green(),
        assets = "=== assets ===".magenta(),
        dev = "dev".green(),
        watch = "--watch".yellow(),
        build = "build".green(),
        info = "=== information ===".magenta(),
        help = "help, h, -h, --help".green(),
        version = "version, v, -v, --version".green(),
        project_name = "project name".yellow(),
        rules = "Syntax rules".red(),
        example = "acme/widget".yellow(),
    )
}

pub fn print_help() {
    println!("{}", help_text());
}

pub fn version_text() -> String {
    format!("version {}", env!("CARGO_PKG_VERSION"))
}

pub fn print_version() {
    println!("{}", version_text());
}
