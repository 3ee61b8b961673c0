use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid S3 URI: {0:?}")]
pub struct InvalidUriError(String);

/// Bucket and key prefix parsed from an `s3://bucket-name/path/to/folder`
/// style URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Uri {
    bucket: String,
    key_prefix: String,
}

impl S3Uri {
    /// Splits `s3://<bucket>/<key-prefix>` into its two parts. The bucket must
    /// be non-empty and contain no `/`; everything after the first `/` is the
    /// key prefix, taken verbatim with no normalization.
    pub fn parse(uri: &str) -> Result<Self, InvalidUriError> {
        let invalid = || InvalidUriError(uri.to_string());
        let rest = uri.strip_prefix("s3://").ok_or_else(invalid)?;
        let (bucket, key_prefix) = rest.split_once('/').ok_or_else(invalid)?;
        if bucket.is_empty() || key_prefix.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            bucket: bucket.to_string(),
            key_prefix: key_prefix.to_string(),
        })
    }

    pub fn get_bucket(&self) -> &str {
        &self.bucket
    }

    pub fn get_key_prefix(&self) -> &str {
        &self.key_prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bucket_and_prefix() {
        let uri = S3Uri::parse("s3://my-bucket/images/product123").unwrap();
        assert_eq!(uri.get_bucket(), "my-bucket");
        assert_eq!(uri.get_key_prefix(), "images/product123");
    }

    #[test]
    fn test_prefix_is_taken_verbatim() {
        let uri = S3Uri::parse("s3://b/a//b/../c/").unwrap();
        assert_eq!(uri.get_key_prefix(), "a//b/../c/");
    }

    #[test]
    fn test_rejects_other_schemes_and_bare_paths() {
        assert!(S3Uri::parse("https://b/k").is_err());
        assert!(S3Uri::parse("b/k").is_err());
        assert!(S3Uri::parse("").is_err());
    }

    #[test]
    fn test_rejects_missing_bucket_or_key() {
        assert!(S3Uri::parse("s3://bucket-only").is_err());
        assert!(S3Uri::parse("s3://bucket/").is_err());
        assert!(S3Uri::parse("s3:///key").is_err());
    }
}
