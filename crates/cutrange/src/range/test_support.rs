//! Test helpers for asserting range compiler outcomes.
use super::{Range, RangeCompiler};
use crate::errors::SpecError;
use crate::symbols::ASCII;

pub(crate) fn compile_ok(text: &str) -> Range {
    match RangeCompiler::new(&ASCII).compile(Some(text), None) {
        Ok(range) => range,
        Err(err) => panic!("range {text:?} should compile: {err}"),
    }
}

pub(crate) fn compile_err(text: &str) -> SpecError {
    match RangeCompiler::new(&ASCII).compile(Some(text), None) {
        Ok(range) => panic!("range {text:?} should fail to compile, got {range}"),
        Err(err) => err,
    }
}
