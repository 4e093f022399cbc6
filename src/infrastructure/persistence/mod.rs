mod postgres_submission_repository;

pub use postgres_submission_repository::PostgresSubmissionRepository;
