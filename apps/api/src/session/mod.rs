// Client session model: the form, the generate/preview/edit cycle, and the
// effects a UI runs against the API. Pure logic, driven by tests here.
#![allow(dead_code)]

pub mod form;
pub mod machine;
