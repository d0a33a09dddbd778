mod fake_drive;

pub use fake_drive::{FakeDrive, FakeEntry, RecordedCall};
