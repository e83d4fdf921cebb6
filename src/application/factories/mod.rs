mod relay_factory;

pub use relay_factory::RelayFactory;
