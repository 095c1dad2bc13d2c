mod pagination;
mod request;
mod signature;

pub use pagination::{paginate, Cursor, Hrefs, Page, PageOptions, Pages};
pub(crate) use request::{
    decode, endpoint_url, get_client, get_request_builder, json_body, parse_base_url, send,
};
