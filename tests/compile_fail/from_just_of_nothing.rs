use tagfold::prelude::*;

fn main() {
    let _ = from_just(nothing());
}
