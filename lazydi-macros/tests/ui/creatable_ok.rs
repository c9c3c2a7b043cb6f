#![allow(missing_docs, dead_code)]

use lazydi::{Creatable, Registry};

#[derive(Default)]
struct Logger;

#[derive(Default)]
struct Cache {
    size: usize,
}

#[derive(Creatable)]
struct Service {
    logger: Logger,
    cache: Cache,
}

#[derive(Creatable)]
struct Marker;

fn main() {
    let registry = Registry::new();
    registry.define::<Service>("Service");
    registry.define::<Marker>("Marker");

    assert_eq!(registry.get::<Service>("Service").unwrap().cache.size, 0);
    assert!(registry.get::<Marker>("Marker").is_ok());
}
