use crate::{
    config::S3Config,
    service::{BlobMetadata, StorageBackend},
};
use s3::{creds::Credentials, error::S3Error, Bucket};

#[derive(Clone, Debug)]
pub struct S3Backend {
    bucket: Bucket,
}

impl S3Backend {
    pub fn new(config: S3Config) -> Result<Self, S3Error> {
        let bucket = Bucket::new(
            &config.bucket.unwrap_or_default(),
            config.region.unwrap_or_default().parse()?,
            Credentials::new(
                config.access_key.as_deref(),
                config.secret_key.as_deref(),
                None,
                None,
                None,
            )?,
        )?;
        log::info!(
            "Using S3 bucket '{}' in '{}' for document storage",
            bucket.name,
            bucket.region
        );
        Ok(S3Backend { bucket })
    }
}

impl StorageBackend for S3Backend {
    type Error = S3Error;

    async fn upload_url(&self, key: &str, expires_secs: u32) -> Result<String, Self::Error> {
        self.bucket.presign_put(key, expires_secs, None).await
    }

    async fn download_url(&self, key: &str, expires_secs: u32) -> Result<String, Self::Error> {
        self.bucket.presign_get(key, expires_secs, None).await
    }

    async fn exists(&self, key: &str) -> Result<bool, Self::Error> {
        match self.bucket.head_object(key).await {
            Ok(_) => Ok(true),
            Err(S3Error::HttpFailWithBody(404, _)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    async fn metadata(&self, key: &str) -> Result<Option<BlobMetadata>, Self::Error> {
        match self.bucket.head_object(key).await {
            Ok((head, _status)) => Ok(Some(BlobMetadata {
                content_type: head.content_type,
                content_length: head.content_length,
                last_modified: head.last_modified,
                etag: head.e_tag,
            })),
            Err(S3Error::HttpFailWithBody(404, _)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        config::S3Config,
        service::documents::{DOWNLOAD_URL_EXPIRY_SECS, UPLOAD_URL_EXPIRY_SECS},
    };

    fn backend() -> S3Backend {
        S3Backend::new(S3Config {
            bucket: Some("tprm-test".into()),
            region: Some("us-east-1".into()),
            access_key: Some("access".into()),
            secret_key: Some("secret".into()),
        })
        .expect("must create")
    }

    /// Presigning is a purely local computation, so we can check the shape of
    /// the handed-out URLs without a bucket.
    #[test_log::test(tokio::test)]
    async fn presigned_urls_carry_key_and_signature() -> anyhow::Result<()> {
        let backend = backend();

        let put = backend
            .upload_url("1/abc-file.pdf", UPLOAD_URL_EXPIRY_SECS)
            .await?;
        assert!(put.contains("abc-file.pdf"));
        assert!(put.contains("X-Amz-Signature"));

        let get = backend
            .download_url("1/abc-file.pdf", DOWNLOAD_URL_EXPIRY_SECS)
            .await?;
        assert!(get.contains("abc-file.pdf"));
        assert!(get.contains("X-Amz-Signature"));

        Ok(())
    }
}
