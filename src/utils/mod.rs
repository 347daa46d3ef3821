pub mod constants;
pub mod enums;
pub mod gather;
pub mod ignore;
pub mod output;
