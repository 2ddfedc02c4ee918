use tagfold::prelude::*;

fn main() {
    let _ = zip_unsafe(tuple![tuple![1, 2], tuple![3]]);
}
