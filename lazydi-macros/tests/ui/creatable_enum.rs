#![allow(missing_docs, dead_code)]

use lazydi::Creatable;

#[derive(Creatable)]
enum Level {
    Debug,
    Info,
}

fn main() {}
