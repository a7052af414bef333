use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    fnship completions bash > ~/.bash_completion.d/fnship\n\n\
                  Generate zsh completions:\n    fnship completions zsh > ~/.zfunc/_fnship\n\n\
                  Generate fish completions:\n    fnship completions fish > ~/.config/fish/completions/fnship.fish\n\n\
                  Generate PowerShell completions:\n    fnship completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
