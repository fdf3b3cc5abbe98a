#[cfg(test)]
mod tests {
    use crate::event_bus::EventBus;
    use crate::store::SessionStore;
    use crate::controller::*;
    use crate::insights::*;
    use crate::market::{cap, check_status, first_quote, normalize_symbol};
    use crate::ports::InsightPort;
    use stockchat_types::event::ChatEvent;
    use stockchat_types::message::*;
    use stockchat_types::session::DEFAULT_TITLE;
    use stockchat_types::ChatError;
    use stockchat_types::market::Quote;
    use std::cell::RefCell;
    use async_trait::async_trait;

    // ─── EventBus Tests ──────────────────────────────────────

    #[test]
    fn test_event_bus_new_is_empty() {
        let bus = EventBus::new();
        assert!(!bus.has_pending());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_clone_shares_state() {
        let bus1 = EventBus::new();
        let bus2 = bus1.clone();

        bus1.emit(ChatEvent::TurnEnd { turn_id: 1 });
        assert!(bus2.has_pending());

        let events = bus2.drain();
        assert_eq!(events.len(), 1);
        assert!(!bus1.has_pending());
    }

    // ─── SessionStore Tests ──────────────────────────────────

    #[test]
    fn test_store_starts_with_one_active_session() {
        let store = SessionStore::new();
        assert_eq!(store.len(), 1);
        let active = store.active().unwrap();
        assert_eq!(active.title, DEFAULT_TITLE);
        assert!(active.messages.is_empty());
    }

    #[test]
    fn test_store_create_session_activates_it() {
        let mut store = SessionStore::new();
        let first = store.active_id().unwrap().to_string();
        let second = store.create_session();

        assert_eq!(store.len(), 2);
        assert_ne!(first, second);
        assert_eq!(store.active_id(), Some(second.as_str()));
        // appended at the end
        assert_eq!(store.sessions()[1].id, second);
    }

    #[test]
    fn test_store_ids_unique() {
        let mut store = SessionStore::empty();
        for _ in 0..50 {
            store.create_session();
        }
        let mut ids: Vec<&str> = store.sessions().iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_store_delete_active_falls_back_to_first() {
        let mut store = SessionStore::new();
        let first = store.active_id().unwrap().to_string();
        let second = store.create_session();
        let third = store.create_session();

        assert!(store.delete_session(&third));
        assert_eq!(store.active_id(), Some(first.as_str()));
        assert!(store.contains(&second));
    }

    #[test]
    fn test_store_delete_inactive_keeps_pointer() {
        let mut store = SessionStore::new();
        let first = store.active_id().unwrap().to_string();
        let second = store.create_session();

        assert!(store.delete_session(&first));
        assert_eq!(store.active_id(), Some(second.as_str()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_delete_only_session_leaves_empty() {
        let mut store = SessionStore::new();
        let only = store.active_id().unwrap().to_string();

        assert!(store.delete_session(&only));
        assert!(store.is_empty());
        assert!(store.active_id().is_none());
        assert!(store.active().is_none());
    }

    #[test]
    fn test_store_delete_missing_is_noop() {
        let mut store = SessionStore::new();
        let active = store.active_id().unwrap().to_string();

        assert!(!store.delete_session("nope"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.active_id(), Some(active.as_str()));
    }

    #[test]
    fn test_store_rename_only_touches_title() {
        let mut store = SessionStore::new();
        let a = store.active_id().unwrap().to_string();
        let b = store.create_session();
        store.append_message(&a, Message::user("hello"));

        assert!(store.rename_session(&a, "Tech stocks"));
        let session = store.get(&a).unwrap();
        assert_eq!(session.title, "Tech stocks");
        assert_eq!(session.messages, vec![Message::user("hello")]);
        assert_eq!(store.get(&b).unwrap().title, DEFAULT_TITLE);
    }

    #[test]
    fn test_store_rename_allows_empty_title() {
        let mut store = SessionStore::new();
        let id = store.active_id().unwrap().to_string();
        assert!(store.rename_session(&id, ""));
        assert_eq!(store.get(&id).unwrap().title, "");
    }

    #[test]
    fn test_store_rename_missing() {
        let mut store = SessionStore::new();
        assert!(!store.rename_session("missing", "x"));
    }

    #[test]
    fn test_store_append_message_order() {
        let mut store = SessionStore::new();
        let id = store.active_id().unwrap().to_string();
        store.append_message(&id, Message::user("one"));
        store.append_message(&id, Message::assistant("two"));
        store.append_message(&id, Message::user("three"));

        let contents: Vec<&str> = store
            .get(&id)
            .unwrap()
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_store_append_missing_is_noop() {
        let mut store = SessionStore::new();
        assert!(!store.append_message("missing", Message::user("hi")));
        assert!(store.active().unwrap().messages.is_empty());
    }

    #[test]
    fn test_store_derive_title_only_once() {
        let mut store = SessionStore::new();
        let id = store.active_id().unwrap().to_string();

        assert!(store.derive_title_from_first_message(&id, "What's the trend"));
        assert_eq!(store.get(&id).unwrap().title, "What's the trend");

        assert!(!store.derive_title_from_first_message(&id, "something else"));
        assert_eq!(store.get(&id).unwrap().title, "What's the trend");
    }

    #[test]
    fn test_store_derive_title_skips_renamed() {
        let mut store = SessionStore::new();
        let id = store.active_id().unwrap().to_string();
        store.rename_session(&id, "Mine");
        assert!(!store.derive_title_from_first_message(&id, "hello"));
        assert_eq!(store.get(&id).unwrap().title, "Mine");
    }

    #[test]
    fn test_store_switch_session() {
        let mut store = SessionStore::new();
        let first = store.active_id().unwrap().to_string();
        store.create_session();

        assert!(store.switch_session(&first));
        assert_eq!(store.active_id(), Some(first.as_str()));
        assert!(!store.switch_session("missing"));
        assert_eq!(store.active_id(), Some(first.as_str()));
    }

    #[test]
    fn test_store_summaries() {
        let mut store = SessionStore::new();
        let id = store.active_id().unwrap().to_string();
        store.append_message(&id, Message::user("hi"));
        let summaries = store.summaries();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].message_count, 1);
    }

    // ─── Insight Tests ───────────────────────────────────────

    #[test]
    fn test_canned_recommendation() {
        let reply = canned_insight("Give me a recommendation");
        assert!(reply.starts_with("Based on current market trends"));
    }

    #[test]
    fn test_canned_compare() {
        let reply = canned_insight("compare AAPL and MSFT");
        assert!(reply.starts_with("When comparing stocks"));
    }

    #[test]
    fn test_canned_trend() {
        let reply = canned_insight("what's the trend");
        assert!(reply.starts_with("Current market trends show"));
    }

    #[test]
    fn test_canned_fallback() {
        let reply = canned_insight("hello");
        assert!(reply.starts_with("I'm sorry, I don't have specific information"));
    }

    #[test]
    fn test_canned_is_case_insensitive() {
        assert_eq!(canned_insight("COMPARE these"), COMPARISON_RESPONSE);
        assert_eq!(canned_insight("Trending now?"), TREND_RESPONSE);
    }

    #[test]
    fn test_canned_first_keyword_wins() {
        assert_eq!(
            canned_insight("compare the trend and give a recommendation"),
            RECOMMENDATION_RESPONSE
        );
        assert_eq!(canned_insight("compare the trend"), COMPARISON_RESPONSE);
    }

    // ─── Market helper Tests ─────────────────────────────────

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol(" aapl ").unwrap(), "AAPL");
        assert_eq!(normalize_symbol("brk.b").unwrap(), "BRK.B");
        assert_eq!(normalize_symbol("^gspc").unwrap(), "^GSPC");
    }

    #[test]
    fn test_normalize_symbol_rejects_garbage() {
        assert!(matches!(normalize_symbol(""), Err(ChatError::InvalidSymbol(_))));
        assert!(matches!(normalize_symbol("   "), Err(ChatError::InvalidSymbol(_))));
        assert!(matches!(normalize_symbol("AAPL/../x"), Err(ChatError::InvalidSymbol(_))));
        assert!(matches!(normalize_symbol("a b"), Err(ChatError::InvalidSymbol(_))));
    }

    #[test]
    fn test_cap() {
        assert_eq!(cap(vec![1, 2, 3, 4, 5, 6, 7], 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(cap(vec![1, 2], 5), vec![1, 2]);
    }

    fn quote(symbol: &str, price: f64) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            price: Some(price),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_quote_empty_is_not_found() {
        let result = first_quote(Vec::new(), "ZZZZ");
        match result {
            Err(ChatError::NotFound(msg)) => assert!(msg.contains("ZZZZ")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_first_quote_single() {
        let q = first_quote(vec![quote("AAPL", 190.0)], "AAPL").unwrap();
        assert_eq!(q.symbol, "AAPL");
        assert_eq!(q.price, Some(190.0));
    }

    #[test]
    fn test_first_quote_takes_first_of_many() {
        let quotes = vec![quote("MSFT", 402.5), quote("MSFT", 1.0), quote("AAPL", 190.0)];
        let q = first_quote(quotes, "MSFT").unwrap();
        assert_eq!(q.price, Some(402.5));
    }

    #[test]
    fn test_check_status_success_range() {
        assert!(check_status(200, String::new()).is_ok());
        assert!(check_status(204, String::new()).is_ok());
        assert!(check_status(299, String::new()).is_ok());
    }

    #[test]
    fn test_check_status_failure_keeps_body() {
        match check_status(401, "Invalid API KEY".to_string()) {
            Err(ChatError::Http { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "Invalid API KEY");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
        assert!(matches!(
            check_status(503, String::new()),
            Err(ChatError::Http { status: 503, .. })
        ));
    }

    // ─── Controller Tests ────────────────────────────────────

    struct FailingInsights;

    #[async_trait(?Send)]
    impl InsightPort for FailingInsights {
        async fn ask(&self, _query: &str) -> stockchat_types::Result<String> {
            Err(ChatError::Network("connection refused".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    /// Records every query it sees
    struct RecordingInsights {
        seen: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl InsightPort for RecordingInsights {
        async fn ask(&self, query: &str) -> stockchat_types::Result<String> {
            self.seen.borrow_mut().push(query.to_string());
            Ok(format!("echo: {}", query))
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    // Simple executor for single-threaded tests (not in WASM here)
    fn block_on<F: std::future::Future<Output = T>, T>(f: F) -> T {
        use std::task::{Context, Poll, Wake, Waker};
        use std::sync::Arc;

        struct NoopWaker;
        impl Wake for NoopWaker {
            fn wake(self: Arc<Self>) {}
        }

        let waker = Waker::from(Arc::new(NoopWaker));
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(val) => return val,
                Poll::Pending => std::thread::yield_now(),
            }
        }
    }

    fn controller() -> (RefCell<ChatController>, EventBus) {
        let bus = EventBus::new();
        (RefCell::new(ChatController::new(bus.clone())), bus)
    }

    fn active_messages(controller: &RefCell<ChatController>) -> Vec<Message> {
        controller.borrow().store.active().unwrap().messages.clone()
    }

    #[test]
    fn test_submit_appends_user_then_assistant() {
        let (controller, _bus) = controller();

        block_on(submit(&controller, &KeywordInsights, "Give me a recommendation")).unwrap();

        let messages = active_messages(&controller);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], Message::user("Give me a recommendation"));
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, RECOMMENDATION_RESPONSE);
        assert_eq!(controller.borrow().state, SubmissionState::Idle);
    }

    #[test]
    fn test_submit_empty_input_is_ignored() {
        let (controller, bus) = controller();

        for input in ["", "   ", "\n\t"] {
            let result = block_on(submit(&controller, &KeywordInsights, input));
            assert_eq!(result, Err(SubmitRejected::EmptyInput));
        }

        assert!(active_messages(&controller).is_empty());
        assert_eq!(controller.borrow().state, SubmissionState::Idle);
        assert!(!bus.has_pending());
    }

    #[test]
    fn test_submit_sets_title_once() {
        let (controller, _bus) = controller();

        block_on(submit(&controller, &KeywordInsights, "What is the trend for semiconductor stocks this year?")).unwrap();
        let title = controller.borrow().store.active().unwrap().title.clone();
        assert_eq!(title, "What is the trend for semicond...");

        block_on(submit(&controller, &KeywordInsights, "hello")).unwrap();
        assert_eq!(controller.borrow().store.active().unwrap().title, title);
        assert_eq!(active_messages(&controller).len(), 4);
    }

    #[test]
    fn test_submit_failure_appends_apology() {
        let (controller, bus) = controller();

        block_on(submit(&controller, &FailingInsights, "compare AAPL and MSFT")).unwrap();

        let messages = active_messages(&controller);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], Message::assistant(APOLOGY_MESSAGE));
        assert_eq!(controller.borrow().state, SubmissionState::Idle);
        // failed lookups leave the placeholder title
        assert_eq!(controller.borrow().store.active().unwrap().title, DEFAULT_TITLE);

        let events = bus.drain();
        assert!(events.iter().any(|e| matches!(e, ChatEvent::InsightFailed { .. })));
        assert!(matches!(events.last(), Some(ChatEvent::TurnEnd { .. })));
    }

    #[test]
    fn test_submit_passes_untrimmed_query() {
        let (controller, _bus) = controller();
        let insights = RecordingInsights { seen: RefCell::new(Vec::new()) };

        block_on(submit(&controller, &insights, "  trend  ")).unwrap();
        assert_eq!(*insights.seen.borrow(), vec!["  trend  ".to_string()]);
    }

    #[test]
    fn test_begin_submit_rejected_while_pending() {
        let (controller, _bus) = controller();
        let mut c = controller.borrow_mut();

        let turn = c.begin_submit("first").unwrap();
        assert!(c.is_busy());
        assert_eq!(c.begin_submit("second"), Err(SubmitRejected::Busy));
        assert_eq!(c.store.active().unwrap().messages.len(), 1);

        c.complete_submit(turn, Ok("done".to_string()));
        assert!(!c.is_busy());
        assert!(c.begin_submit("second").is_ok());
    }

    #[test]
    fn test_begin_submit_without_session() {
        let bus = EventBus::new();
        let mut c = ChatController::with_store(SessionStore::empty(), bus);
        assert_eq!(c.begin_submit("hello"), Err(SubmitRejected::NoActiveSession));
        assert!(!c.is_busy());
    }

    #[test]
    fn test_reply_targets_captured_session_after_switch() {
        let (controller, _bus) = controller();
        let mut c = controller.borrow_mut();
        let original = c.store.active_id().unwrap().to_string();

        let turn = c.begin_submit("what's the trend").unwrap();
        let other = c.new_chat();
        assert_eq!(c.store.active_id(), Some(other.as_str()));

        c.complete_submit(turn, Ok(TREND_RESPONSE.to_string()));

        assert_eq!(c.store.get(&original).unwrap().messages.len(), 2);
        assert_eq!(c.store.get(&original).unwrap().title, "what's the trend");
        assert!(c.store.get(&other).unwrap().messages.is_empty());
        assert_eq!(c.store.get(&other).unwrap().title, DEFAULT_TITLE);
    }

    #[test]
    fn test_reply_discarded_when_session_deleted() {
        let (controller, bus) = controller();
        let mut c = controller.borrow_mut();
        let original = c.store.active_id().unwrap().to_string();

        let turn = c.begin_submit("hello").unwrap();
        c.new_chat();
        c.delete_chat(&original);
        c.complete_submit(turn, Ok("late".to_string()));

        assert_eq!(c.state, SubmissionState::Idle);
        assert_eq!(c.store.len(), 1);
        assert!(c.store.active().unwrap().messages.is_empty());

        let events = bus.drain();
        assert!(events.iter().any(|e| matches!(e, ChatEvent::ResponseDiscarded { .. })));
    }

    #[test]
    fn test_turn_events_in_order() {
        let (controller, bus) = controller();
        let session_id = controller.borrow().store.active_id().unwrap().to_string();

        let turn_id = block_on(submit(&controller, &KeywordInsights, "hello")).unwrap();

        let events = bus.drain();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            ChatEvent::TurnStart { turn_id, session_id: session_id.clone() }
        );
        assert_eq!(
            events[1],
            ChatEvent::InsightReady {
                session_id,
                text: FALLBACK_RESPONSE.to_string(),
            }
        );
        assert_eq!(events[2], ChatEvent::TurnEnd { turn_id });
    }

    #[test]
    fn test_turn_ids_increase() {
        let (controller, _bus) = controller();
        let a = block_on(submit(&controller, &KeywordInsights, "a")).unwrap();
        let b = block_on(submit(&controller, &KeywordInsights, "b")).unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_sidebar_actions_emit_events() {
        let (controller, bus) = controller();
        let mut c = controller.borrow_mut();

        let id = c.new_chat();
        c.share_chat(&id);
        assert!(c.rename_chat(&id, "Renamed"));
        assert!(c.delete_chat(&id));
        assert!(!c.delete_chat(&id));

        let events = bus.drain();
        assert_eq!(
            events,
            vec![
                ChatEvent::SessionCreated { session_id: id.clone() },
                ChatEvent::ShareUnavailable { session_id: id.clone() },
                ChatEvent::SessionDeleted { session_id: id },
            ]
        );
    }

    #[test]
    fn test_share_changes_nothing() {
        let (controller, _bus) = controller();
        let mut c = controller.borrow_mut();
        let id = c.store.active_id().unwrap().to_string();
        c.share_chat(&id);
        assert_eq!(c.store.len(), 1);
        assert_eq!(c.store.get(&id).unwrap().title, DEFAULT_TITLE);
    }
}
