//! The `rcd init` shell integration snippet.
//!
//! The user puts `eval "$(rcd init)"` in their shell rc. The snippet defines
//! an `rcd` function that evaluates whatever `rcd cd` prints, aliases `cd`
//! to it, and wires up bash completion offering the mode flags alongside
//! directory names. `command rcd` keeps the function from recursing into
//! itself instead of running the binary.

/// Returns the sh snippet that installs the shell integration.
pub fn init_snippet() -> &'static str {
    r#"rcd() {
    eval "$(command rcd cd "$@")"
}
_rcd() {
    local cur prev word cword
    _init_completion || return
    compopt -o filenames
    case $cword in
    1)
        COMPREPLY=( $(compgen -W "-f -r -H" -- $cur) $(compgen -d -- $cur) );;
    *)
        COMPREPLY=( $(compgen -d -- $cur) );;
    esac
}
alias cd="rcd"
complete -o nosort -F _rcd rcd
complete -o nosort -F _rcd cd"#
}
