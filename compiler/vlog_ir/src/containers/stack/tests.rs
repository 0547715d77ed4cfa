use super::*;

#[test]
fn test_push_pop_lifo() {
    let mut stack = AstStack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.depth(), 3);
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn test_peek_second() {
    let mut stack = AstStack::new();
    assert_eq!(stack.peek_second(), None);
    stack.push("outer");
    assert_eq!(stack.peek(), Some(&"outer"));
    assert_eq!(stack.peek_second(), None);
    stack.push("inner");
    assert_eq!(stack.peek(), Some(&"inner"));
    assert_eq!(stack.peek_second(), Some(&"outer"));
    assert_eq!(stack.depth(), 2);
}

#[test]
fn test_peek_mut() {
    let mut stack = AstStack::new();
    stack.push(1);
    if let Some(top) = stack.peek_mut() {
        *top = 5;
    }
    assert_eq!(stack.peek(), Some(&5));
}

#[test]
fn test_iter_is_top_down() {
    let mut stack = AstStack::new();
    stack.push('a');
    stack.push('b');
    stack.push('c');
    assert_eq!(stack.iter().copied().collect::<String>(), "cba");
    stack.clear();
    assert_eq!(stack.depth(), 0);
}
