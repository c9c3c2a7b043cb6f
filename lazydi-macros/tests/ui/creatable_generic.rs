#![allow(missing_docs, dead_code)]

use lazydi::Creatable;

#[derive(Creatable)]
struct Wrapper<T>(T);

fn main() {}
