use crate::docket::sms::create_sms_link;
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct SmsLinkOptions {
    pub message: String,
    pub recipient: Option<String>,
}

pub fn run(opts: &SmsLinkOptions) -> Result<String> {
    Ok(create_sms_link(&opts.message, opts.recipient.as_deref()))
}
