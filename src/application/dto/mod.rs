/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and adapters, keeping
/// the bucketing engine isolated.
mod notice_request;
mod notice_response;
mod output_format;

pub use notice_request::NoticeRequest;
pub use notice_response::NoticeResponse;
pub use output_format::OutputFormat;
