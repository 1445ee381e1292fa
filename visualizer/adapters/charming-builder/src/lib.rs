pub use builder::CharmingBuilder;

mod builder;
