//! Shell directive construction.
//!
//! rcd cannot change its parent shell's directory; it prints a command line
//! and the shell function installed by `rcd init` evaluates it. Every
//! builder here is a pure function of its arguments: no subprocess is
//! spawned and no file is touched. `\cd` bypasses the alias the init
//! snippet installs, so the emitted command reaches the shell builtin.

use std::path::Path;

/// Directive for plain navigation: change to `target` directly.
pub fn plain(target: &str) -> String {
    format!("\\cd \"{}\"", target)
}

/// Directive for the fuzzy picker: walk directories under `start` and let
/// `fzf` choose one.
///
/// Unreadable subtrees are pruned so `find` stays quiet on permission
/// errors, and a cancelled picker falls back to `.` (a no-op cd).
pub fn fuzzy(start: &str) -> String {
    format!(
        "\\cd \"$(find {} ! -readable -prune -o -type d -print | fzf -0 || echo .)\"",
        start
    )
}

/// Directive for the repository picker: choose among `ghq`-managed
/// checkouts.
///
/// The selection is echoed back so the user sees what was picked; an empty
/// selection (picker cancelled) leaves the shell where it is.
pub fn repo() -> String {
    concat!(
        "RCD_ROOT=$(ghq root);\n",
        "RCD_TARGET=$(ghq list | fzf);\n",
        "echo $RCD_TARGET;\n",
        "[ \"${RCD_TARGET}\" = \"\" ] || \\cd $RCD_ROOT/$RCD_TARGET;\n",
    )
    .to_string()
}

/// Directive for the history picker: replay `history_file` through `fzf`,
/// most recent first.
///
/// The file stores entries most-recent-last, so `tac` restores the
/// presentation order the read-back contract promises. A cancelled picker
/// falls back to `.`.
pub fn history(history_file: &Path) -> String {
    format!(
        "\\cd \"$(tac {} | fzf || echo .)\"",
        history_file.display()
    )
}
