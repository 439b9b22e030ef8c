/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use svs_common::collections::RingDeque;

/// run with "cargo test --test test_ring_deque -- --nocapture"

#[test]
fn test_push () {
    println!("--- testing ringbuffer push");
    let mut ring: RingDeque<usize> = RingDeque::new(5);
    for d in 0..5 {
        assert_eq!( None, ring.push_to_ringbuffer(d));
    }
    assert_eq!( 5, ring.len());

    for d in 5..9 {
        let evicted = ring.push_to_ringbuffer(d);
        println!("{d} -> evicted {evicted:?}: {ring:?}");
        assert_eq!( Some(d-5), evicted);
    }

    assert_eq!( vec![4,5,6,7,8], ring.to_vec());
    assert_eq!( Some(&8), ring.back());
    assert_eq!( Some(&4), ring.front());
    assert_eq!( Some(&7), ring.nth_back(1));
    assert_eq!( None, ring.nth_back(5));
}

#[test]
fn test_clear () {
    let mut ring: RingDeque<usize> = RingDeque::new(3);
    for d in 0..10 { ring.push_to_ringbuffer(d); }
    assert_eq!( 3, ring.len());

    ring.clear();
    assert!( ring.is_empty());
    assert_eq!( None, ring.back());
    assert_eq!( 3, ring.max_len());
}
