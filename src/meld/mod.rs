//! Meld shapes and the rules for recognizing them.

pub mod validate;

pub use validate::{
    check_group, check_run, is_valid_group, is_valid_run, meld_score, validate, GroupDefect,
    InvalidMeldReason, MeldKind, RunDefect, FIRST_PLAY_MINIMUM, MIN_MELD_TILES,
};
