mod request;
mod settings;
mod share;
mod task;

mod default_impl {
    use bsrcore::platform::DefaultWFPlatform;
    use crate::backend::db::SqliteBackend;

    impl DefaultWFPlatform for SqliteBackend {}
}
