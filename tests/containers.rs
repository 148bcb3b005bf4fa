use bst::{stack, EmptyStructureError, Queue, Stack};

#[test]
fn stack_walkthrough() {
    assert_eq!(stack::reverse("Hello, World!"), "!dlroW ,olleH");

    let mut stack = Stack::new();
    stack.push(10);
    stack.push(20);
    stack.push(30);

    assert_eq!(stack.peek(), Ok(&30));
    assert_eq!(stack.pop(), Ok(30));
    assert_eq!(stack.pop(), Ok(20));
    assert_eq!(stack.pop(), Ok(10));
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(EmptyStructureError::Stack));
}

#[test]
fn queue_walkthrough() {
    let mut queue = Queue::new();
    queue.enqueue("Task 1");
    queue.enqueue("Task 2");
    queue.enqueue("Task 3");

    assert_eq!(queue.to_string(), "[Task 1, Task 2, Task 3]");
    assert_eq!(queue.peek(), Ok(&"Task 1"));
    assert_eq!(queue.dequeue(), Ok("Task 1"));
    assert_eq!(queue.dequeue(), Ok("Task 2"));
    assert_eq!(queue.dequeue(), Ok("Task 3"));
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), Err(EmptyStructureError::Queue));
}

#[test]
fn errors_are_distinguishable() {
    let err: Box<dyn std::error::Error> = Box::new(EmptyStructureError::Queue);

    assert_eq!(err.to_string(), "queue is empty");
    assert_ne!(EmptyStructureError::Stack, EmptyStructureError::Queue);
}
