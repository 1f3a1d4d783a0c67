/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]

use criterion::{Criterion, criterion_group, criterion_main};
use std::collections::LinkedList;
use std::hint::black_box;

/// `LinkedList` has no stable positional insert, so split, push and rejoin.
fn insert_at<T>(linked_list: &mut LinkedList<T>, position: usize, value: T) {
    let mut back = linked_list.split_off(position);

    linked_list.push_back(value);
    linked_list.append(&mut back);
}

fn std_linked_list_push_front(c: &mut Criterion) {
    let limit = 100_000;

    c.bench_function("std linked list push front", move |b| {
        b.iter(|| {
            let mut linked_list: LinkedList<usize> = LinkedList::new();

            for i in 0..limit {
                linked_list.push_front(i);
            }

            linked_list
        });
    });
}

fn std_linked_list_push_back(c: &mut Criterion) {
    let limit = 100_000;

    c.bench_function("std linked list push back", move |b| {
        b.iter(|| {
            let mut linked_list: LinkedList<usize> = LinkedList::new();

            for i in 0..limit {
                linked_list.push_back(i);
            }

            linked_list
        });
    });
}

fn std_linked_list_insert_middle(c: &mut Criterion) {
    let limit = 2_000;

    c.bench_function("std linked list insert middle", move |b| {
        b.iter(|| {
            let mut linked_list: LinkedList<usize> = LinkedList::new();

            for i in 0..limit {
                let position = linked_list.len() / 2;

                insert_at(&mut linked_list, position, i);
            }

            linked_list
        });
    });
}

fn std_linked_list_iterate(c: &mut Criterion) {
    let limit = 100_000;
    let mut linked_list: LinkedList<usize> = LinkedList::new();

    for i in 0..limit {
        linked_list.push_back(i);
    }

    c.bench_function("std linked list iterate", move |b| {
        b.iter(|| {
            for i in &linked_list {
                black_box(i);
            }
        });
    });
}

criterion_group!(
    benches,
    std_linked_list_push_front,
    std_linked_list_push_back,
    std_linked_list_insert_middle,
    std_linked_list_iterate
);
criterion_main!(benches);
