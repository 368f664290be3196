use pacman_sim::{
    data_structures::{PriorityQueue, Queue, Stack},
    search_problem::Cost,
};

use super::Strategy;

/// Frontier container whose pop order is picked by the strategy.
#[derive(Debug)]
pub(crate) enum Fringe<T> {
    Stack(Stack<T>),
    Queue(Queue<T>),
    Priority(PriorityQueue<T>),
}

impl<T> Fringe<T> {
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::DepthFirst => Fringe::Stack(Stack::new()),
            Strategy::BreadthFirst => Fringe::Queue(Queue::new()),
            Strategy::UniformCost | Strategy::AStar => Fringe::Priority(PriorityQueue::new()),
        }
    }

    /// `priority` is ignored by the stack and the queue.
    #[inline]
    pub fn push(&mut self, item: T, priority: Cost) {
        match self {
            Fringe::Stack(s) => s.push(item),
            Fringe::Queue(q) => q.push(item),
            Fringe::Priority(pq) => pq.push(item, priority),
        }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        match self {
            Fringe::Stack(s) => s.pop(),
            Fringe::Queue(q) => q.pop(),
            Fringe::Priority(pq) => pq.pop(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Fringe::Stack(s) => s.len(),
            Fringe::Queue(q) => q.len(),
            Fringe::Priority(pq) => pq.len(),
        }
    }
}
