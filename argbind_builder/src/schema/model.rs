use crate::api::{Sequence, Slot};
use crate::constant::*;
use crate::model::{ArgumentTag, ValueKind};

/// Where a resolved option writes to.
#[derive(Debug)]
pub(crate) enum Target<'a> {
    Help,
    Version,
    Slot(Slot<'a>),
}

#[derive(Debug)]
pub(crate) struct OptionEntry<'a> {
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    // Raw text, converted only when the option is left untouched by a scan.
    pub(crate) default: Option<String>,
    pub(crate) help: Option<String>,
    pub(crate) target: Target<'a>,
}

impl<'a> OptionEntry<'a> {
    pub(crate) fn help_flag() -> Self {
        Self {
            name: HELP_NAME.to_string(),
            short: None,
            default: None,
            help: Some(HELP_MESSAGE.to_string()),
            target: Target::Help,
        }
    }

    pub(crate) fn version_flag() -> Self {
        Self {
            name: VERSION_NAME.to_string(),
            short: None,
            default: None,
            help: Some(VERSION_MESSAGE.to_string()),
            target: Target::Version,
        }
    }

    pub(crate) fn kind(&self) -> ValueKind {
        match &self.target {
            Target::Help | Target::Version => ValueKind::Flag,
            Target::Slot(slot) => slot.kind(),
        }
    }
}

#[derive(Debug)]
pub(crate) enum Binding<'a> {
    Single(Slot<'a>),
    Many(Sequence<'a>),
}

impl<'a> Binding<'a> {
    pub(crate) fn kind(&self) -> ValueKind {
        match self {
            Binding::Single(slot) => slot.kind(),
            Binding::Many(sequence) => sequence.kind(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct ArgumentEntry<'a> {
    pub(crate) name: String,
    pub(crate) tag: ArgumentTag,
    pub(crate) default: Option<String>,
    pub(crate) help: Option<String>,
    pub(crate) binding: Binding<'a>,
}
