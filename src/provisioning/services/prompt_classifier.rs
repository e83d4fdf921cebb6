/// Canned artifact families the simulated backend can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentTemplate {
    S3Bucket,
    Ec2Instance,
    Placeholder,
}

/// PromptClassifier - picks a canned template by keyword
///
/// Matching is a case-insensitive substring search. Storage keywords are
/// checked before compute keywords, so "bucket on an instance" is an S3 bucket.
pub struct PromptClassifier;

impl PromptClassifier {
    const S3_KEYWORDS: [&'static str; 2] = ["s3", "bucket"];
    const EC2_KEYWORDS: [&'static str; 2] = ["ec2", "instance"];

    pub fn classify(prompt: &str) -> ComponentTemplate {
        let lowered = prompt.to_lowercase();

        if Self::S3_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            ComponentTemplate::S3Bucket
        } else if Self::EC2_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            ComponentTemplate::Ec2Instance
        } else {
            ComponentTemplate::Placeholder
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_prompts() {
        assert_eq!(
            PromptClassifier::classify("Create an S3 bucket with versioning"),
            ComponentTemplate::S3Bucket
        );
        assert_eq!(
            PromptClassifier::classify("I need a BUCKET"),
            ComponentTemplate::S3Bucket
        );
    }

    #[test]
    fn test_instance_prompts() {
        assert_eq!(
            PromptClassifier::classify("Set up an EC2 box"),
            ComponentTemplate::Ec2Instance
        );
        assert_eq!(
            PromptClassifier::classify("one Instance please"),
            ComponentTemplate::Ec2Instance
        );
    }

    #[test]
    fn test_storage_wins_over_compute() {
        assert_eq!(
            PromptClassifier::classify("ec2 instance that writes to a bucket"),
            ComponentTemplate::S3Bucket
        );
    }

    #[test]
    fn test_unmatched_prompt() {
        assert_eq!(
            PromptClassifier::classify("a VPC with two subnets"),
            ComponentTemplate::Placeholder
        );
    }
}
