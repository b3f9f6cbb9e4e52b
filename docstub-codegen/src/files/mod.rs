mod readme;
mod type_stub;

pub use readme::{README_TARGET, ReadmeCopy};
pub use type_stub::{STUB_EXTENSION, TypeStub};
