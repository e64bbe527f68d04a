use bsrcore::request;

use crate::Platform;

pub struct Request<'a> {
    platform: &'a Platform,
    request: request::Request,
}

mod impls;
