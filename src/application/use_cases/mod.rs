/// Use cases module containing application business logic orchestration
mod relay_requests;

pub use relay_requests::RelayUseCase;
