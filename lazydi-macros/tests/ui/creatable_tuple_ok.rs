#![allow(missing_docs, dead_code)]

use lazydi::Creatable;

#[derive(Default)]
struct Left(u8);

#[derive(Default)]
struct Right(String);

#[derive(Creatable)]
struct Pair(Left, Right);

fn main() {
    let pair = Pair::create().unwrap();

    assert_eq!(pair.0.0, 0);
    assert!(pair.1.0.is_empty());
}
