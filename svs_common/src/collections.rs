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

use std::collections::{VecDeque, vec_deque};

/// a VecDeque used as a ringbuffer with an explicit upper length bound. We do not rely on
/// `VecDeque::capacity()` since the allocator is free to hand out more than was requested.
/// All storage is allocated upfront, i.e. pushing never allocates
#[derive(Debug,Clone)]
pub struct RingDeque<T> {
    max_len: usize,
    items: VecDeque<T>
}

impl<T> RingDeque<T> {
    pub fn new (max_len: usize)->Self {
        let max_len = max_len.max(1);
        RingDeque { max_len, items: VecDeque::with_capacity(max_len) }
    }

    pub fn max_len (&self)->usize { self.max_len }
    pub fn len (&self)->usize { self.items.len() }
    pub fn is_empty (&self)->bool { self.items.is_empty() }

    /// push a new element to the end, evicting (and returning) the oldest one if we are at max_len
    pub fn push_to_ringbuffer (&mut self, t: T)->Option<T> {
        let evicted = if self.items.len() >= self.max_len { self.items.pop_front() } else { None };
        self.items.push_back(t);
        evicted
    }

    /// the newest element
    pub fn back (&self)->Option<&T> { self.items.back() }

    /// the oldest element
    pub fn front (&self)->Option<&T> { self.items.front() }

    /// element `n` positions from the newest one (0 is the newest)
    pub fn nth_back (&self, n: usize)->Option<&T> {
        let len = self.items.len();
        if n < len { self.items.get( len - 1 - n) } else { None }
    }

    /// iterate from oldest to newest
    pub fn iter (&self)->vec_deque::Iter<'_,T> { self.items.iter() }

    pub fn clear (&mut self) { self.items.clear() }

    pub fn to_vec (&self)->Vec<T> where T: Clone {
        self.items.iter().cloned().collect()
    }
}

impl<'a,T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a,T>;

    fn into_iter (self)->Self::IntoIter { self.items.iter() }
}
