mod envelope;
pub use self::envelope::Envelope;

mod result;
pub use self::result::CallResult;

mod status;
pub use self::status::ExpectedStatusCodes;
