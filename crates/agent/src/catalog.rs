//! Built-in routing triggers and scripted replies for Hotel Rafaela.
//!
//! Order is significant everywhere in this file: routing walks agents in
//! priority order and triggers top to bottom, and the scripted resolver
//! returns the first trigger that matches.

use frontdesk_core::{Agent, Language};

/// Trigger phrase followed by its candidate replies.
pub type ScriptSource = &'static [(&'static str, &'static [&'static str])];

/// Routing triggers for `agent`, in match order.
pub fn routing_triggers(agent: Agent) -> &'static [&'static str] {
    match agent {
        Agent::Host => HOST_TRIGGERS,
        Agent::Concierge => CONCIERGE_TRIGGERS,
        Agent::Support => SUPPORT_TRIGGERS,
    }
}

/// Surface variants collapsed before routing.
pub const ROUTING_ALIASES: &[(&str, &str)] = &[("check-in", "check in"), ("check-out", "check out")];

const HOST_TRIGGERS: &[&str] = &[
    "hello", "hi", "hey", "greetings", "good morning", "good afternoon", "good evening",
    "welcome", "information", "tell me about", "what is", "where is", "how do i get",
    "facilities", "amenities", "services", "location", "directions", "address",
    "wifi", "parking", "pool", "gym", "restaurant", "breakfast", "lobby",
    "check in time", "check out time", "hotel policy", "policies",
    "help", "assist", "guide", "tour", "general", "question",
];

const CONCIERGE_TRIGGERS: &[&str] = &[
    "book", "booking", "reservation", "reserve", "schedule", "availability",
    "available", "room", "rooms", "suite", "vacancy", "free rooms",
    "payment", "pay", "price", "cost", "rate", "pricing", "charge",
    "credit card", "deposit", "cancellation", "cancel", "modify booking",
    "discount", "promo", "offer", "package", "deal",
    "dates", "nights", "stay", "duration", "when can i",
    "upgrade", "downgrade", "change room", "room type", "room types",
];

const SUPPORT_TRIGGERS: &[&str] = &[
    "support", "help with", "issue", "problem", "complaint", "concern",
    "broken", "not working", "fix", "repair", "maintenance",
    "lost", "found", "missing", "forgot", "left behind",
    "housekeeping", "clean", "cleaning", "towels", "toiletries",
    "request", "need", "extra", "additional", "more",
    "noise", "loud", "disturb", "quiet",
    "temperature", "ac", "air conditioning", "heating", "cold", "hot",
    "tv", "remote", "phone", "safe", "minibar",
    "emergency", "urgent", "now", "immediate", "pillows",
];

/// Every built-in scripted table.
pub fn scripted_tables() -> Vec<(Agent, Language, ScriptSource)> {
    vec![
        (Agent::Host, Language::En, HOST_EN),
        (Agent::Host, Language::Tl, HOST_TL),
        (Agent::Host, Language::Zh, HOST_ZH),
        (Agent::Host, Language::Ja, HOST_JA),
        (Agent::Host, Language::Ko, HOST_KO),
        (Agent::Concierge, Language::En, CONCIERGE_EN),
        (Agent::Concierge, Language::Tl, CONCIERGE_TL),
        (Agent::Concierge, Language::Zh, CONCIERGE_ZH),
        (Agent::Concierge, Language::Ja, CONCIERGE_JA),
        (Agent::Concierge, Language::Ko, CONCIERGE_KO),
        (Agent::Support, Language::En, SUPPORT_EN),
        (Agent::Support, Language::Tl, SUPPORT_TL),
        (Agent::Support, Language::Zh, SUPPORT_ZH),
        (Agent::Support, Language::Ja, SUPPORT_JA),
        (Agent::Support, Language::Ko, SUPPORT_KO),
    ]
}

// --- Host (Sarah) ---

const HOST_EN: ScriptSource = &[
    ("hello", &["Hello! Welcome to Hotel Rafaela. How may I assist you today?"]),
    ("hi", &["Hi there! I'm Sarah, your host assistant. What can I help you with?"]),
    ("facilities", &["We offer a swimming pool, fitness center, restaurant, free WiFi, and parking. What would you like to know more about?"]),
    ("wifi", &["Free WiFi is available throughout the hotel. The password is \"Rafaela2024\". Would you like help connecting?"]),
    ("parking", &["We offer complimentary parking for all guests. The entrance is on the west side of the building."]),
    ("check in", &["Check-in time is 2:00 PM and check-out is 12:00 PM. Early check-in may be available upon request."]),
    ("location", &["Hotel Rafaela is located in the heart of the city, near major attractions and transport hubs."]),
];

const HOST_TL: ScriptSource = &[
    ("hello", &["Kumusta! Maligayang pagdating sa Hotel Rafaela. Paano kita matutulungan ngayon?"]),
    ("hi", &["Kumusta! Ako si Sarah, ang inyong host assistant. Ano ang maitutulong ko?"]),
    ("facilities", &["Mayroon kaming swimming pool, fitness center, restaurant, libreng WiFi, at parking. Ano ang gusto mong malaman?"]),
    ("wifi", &["Libreng WiFi sa buong hotel. Ang password ay \"Rafaela2024\". Kailangan mo ba ng tulong sa pagkonekta?"]),
    ("parking", &["May libreng parking para sa lahat ng guests. Ang entrance ay nasa west side ng building."]),
    ("check in", &["Ang check-in ay 2:00 PM at check-out ay 12:00 PM. Pwedeng humiling ng early check-in."]),
    ("location", &["Ang Hotel Rafaela ay nasa gitna ng lungsod, malapit sa mga pangunahing atraksyon."]),
];

const HOST_ZH: ScriptSource = &[
    ("hello", &["您好！欢迎来到拉法埃拉酒店。我能为您做些什么？"]),
    ("hi", &["您好！我是莎拉，您的接待助理。我能帮您什么？"]),
    ("facilities", &["我们提供游泳池、健身中心、餐厅、免费WiFi和停车场。您想了解什么？"]),
    ("wifi", &["整个酒店提供免费WiFi。密码是\"Rafaela2024\"。需要帮助连接吗？"]),
    ("parking", &["我们为所有客人提供免费停车。入口在建筑物西侧。"]),
    ("check in", &["入住时间是下午2点，退房时间是中午12点。可以要求提前入住。"]),
    ("location", &["拉法埃拉酒店位于市中心，靠近主要景点和交通枢纽。"]),
];

const HOST_JA: ScriptSource = &[
    ("hello", &["こんにちは！ホテルラファエラへようこそ。何かお手伝いできますか？"]),
    ("hi", &["こんにちは！私はサラ、ホストアシスタントです。何をお手伝いできますか？"]),
    ("facilities", &["プール、フィットネスセンター、レストラン、無料WiFi、駐車場があります。何について知りたいですか？"]),
    ("wifi", &["ホテル全体で無料WiFiをご利用いただけます。パスワードは「Rafaela2024」です。接続のお手伝いが必要ですか？"]),
    ("parking", &["全てのゲストに無料駐車場を提供しています。入口は建物の西側にあります。"]),
    ("check in", &["チェックインは午後2時、チェックアウトは正午12時です。アーリーチェックインをリクエストできます。"]),
    ("location", &["ホテルラファエラは市の中心部にあり、主要な観光地や交通機関の近くです。"]),
];

const HOST_KO: ScriptSource = &[
    ("hello", &["안녕하세요! 호텔 라파엘라에 오신 것을 환영합니다. 무엇을 도와드릴까요?"]),
    ("hi", &["안녕하세요! 저는 사라, 호스트 도우미입니다. 무엇을 도와드릴까요?"]),
    ("facilities", &["수영장, 피트니스 센터, 레스토랑, 무료 WiFi 및 주차장이 있습니다. 무엇에 대해 알고 싶으신가요?"]),
    ("wifi", &["호텔 전체에서 무료 WiFi를 이용하실 수 있습니다. 비밀번호는 \"Rafaela2024\"입니다. 연결에 도움이 필요하신가요?"]),
    ("parking", &["모든 투숙객에게 무료 주차를 제공합니다. 입구는 건물 서쪽에 있습니다."]),
    ("check in", &["체크인은 오후 2시, 체크아웃은 정오 12시입니다. 조기 체크인을 요청할 수 있습니다."]),
    ("location", &["호텔 라파엘라는 도심에 위치하며 주요 명소와 교통 허브 근처에 있습니다."]),
];

// --- Concierge (Daisy) ---

const CONCIERGE_EN: ScriptSource = &[
    (
        "book",
        &[
            "I'd be happy to help you with a booking! What dates are you looking for?",
            "Wonderful, let's find you a room! Which dates would you like to stay with us?",
        ],
    ),
    ("availability", &["Let me check our availability for you. What dates do you need?"]),
    ("price", &["Our rooms start at $120/night for Standard, $180/night for Deluxe, and $250/night for Suite. What type interests you?"]),
    ("room", &["We have Standard rooms, Deluxe rooms, and Suites. Each comes with different amenities. Which would you like to know about?"]),
    ("room types", &["We have Standard rooms, Deluxe rooms, and Suites. Each comes with different amenities. Which would you like to know about?"]),
    ("payment", &["We accept all major credit cards, debit cards, and cash. A deposit is required to confirm your reservation."]),
    ("cancel", &["Our cancellation policy allows free cancellation up to 24 hours before check-in. Would you like to proceed?"]),
];

const CONCIERGE_TL: ScriptSource = &[
    ("book", &["Matutuwa akong tumulong sa booking! Anong mga petsa ang kailangan mo?"]),
    ("availability", &["Titingnan ko ang availability. Anong mga petsa ang kailangan mo?"]),
    ("price", &["Ang aming mga kuwarto ay nagsisimula sa $120/gabi para sa Standard, $180/gabi para sa Deluxe, at $250/gabi para sa Suite. Alin ang interesado ka?"]),
    ("room", &["Mayroon kaming Standard rooms, Deluxe rooms, at Suites. May iba't ibang amenities ang bawat isa. Alin ang gusto mong malaman?"]),
    ("room types", &["Mayroon kaming Standard rooms, Deluxe rooms, at Suites. May iba't ibang amenities ang bawat isa. Alin ang gusto mong malaman?"]),
    ("payment", &["Tumatanggap kami ng lahat ng major credit cards, debit cards, at cash. Kailangan ng deposit para kumpirmahin ang reservation."]),
    ("bayad", &["Tumatanggap kami ng lahat ng major credit cards, debit cards, at cash. Kailangan ng deposit para kumpirmahin ang reservation."]),
    ("cancel", &["Ang aming cancellation policy ay nagbibigay-daan sa libreng cancellation hanggang 24 oras bago ang check-in. Gusto mo bang magpatuloy?"]),
];

const CONCIERGE_ZH: ScriptSource = &[
    ("book", &["我很乐意帮您预订！您需要什么日期？"]),
    ("availability", &["让我为您查看可用性。您需要什么日期？"]),
    ("price", &["我们的房间价格从标准间每晚120美元、豪华间每晚180美元、套房每晚250美元起。您对哪种感兴趣？"]),
    ("room types", &["我们有标准间、豪华间和套房。每种都有不同的设施。您想了解哪一种？"]),
    ("payment", &["我们接受所有主要信用卡、借记卡和现金。需要押金来确认您的预订。"]),
    ("cancel", &["我们的取消政策允许在入住前24小时免费取消。您想继续吗？"]),
];

const CONCIERGE_JA: ScriptSource = &[
    ("book", &["予約のお手伝いをさせていただきます！どの日程をお探しですか？"]),
    ("availability", &["空室状況を確認いたします。どの日程が必要ですか？"]),
    ("price", &["客室料金はスタンダード1泊120ドル、デラックス1泊180ドル、スイート1泊250ドルからです。どれに興味がありますか？"]),
    ("room types", &["スタンダードルーム、デラックスルーム、スイートがあります。それぞれ異なるアメニティがあります。どれについて知りたいですか？"]),
    ("payment", &["主要なクレジットカード、デビットカード、現金をお受けしています。予約確認には保証金が必要です。"]),
    ("cancel", &["キャンセルポリシーではチェックイン24時間前まで無料キャンセルが可能です。続けますか？"]),
];

const CONCIERGE_KO: ScriptSource = &[
    ("book", &["예약을 도와드리겠습니다! 어떤 날짜를 찾고 계신가요?"]),
    ("availability", &["예약 가능 여부를 확인하겠습니다. 어떤 날짜가 필요하신가요?"]),
    ("price", &["객실 요금은 스탠다드 1박 120달러, 디럭스 1박 180달러, 스위트 1박 250달러부터 시작합니다. 어떤 유형에 관심이 있으신가요?"]),
    ("room types", &["스탠다드룸, 디럭스룸, 스위트가 있습니다. 각각 다른 편의시설이 있습니다. 어떤 것에 대해 알고 싶으신가요?"]),
    ("payment", &["모든 주요 신용카드, 직불카드 및 현금을 받습니다. 예약 확인을 위해 보증금이 필요합니다."]),
    ("cancel", &["취소 정책은 체크인 24시간 전까지 무료 취소가 가능합니다. 계속하시겠습니까?"]),
];

// --- Support (John) ---

const SUPPORT_EN: ScriptSource = &[
    ("help", &["I'm here to help! What do you need assistance with?"]),
    ("problem", &["I'm sorry to hear that. Please tell me what the issue is and I'll resolve it right away."]),
    ("housekeeping", &["I'll send housekeeping to your room immediately. What do you need?"]),
    ("maintenance", &["I'll dispatch our maintenance team right away. What needs to be fixed?"]),
    ("Pillows", &["I'll have new pillows delivered to your room within 10 minutes. What room are you in?"]),
    ("towels", &["I'll have fresh towels delivered to your room within 10 minutes. What room are you in?"]),
    ("noise", &["I apologize for the disturbance. I'll address this immediately. What room are you in?"]),
    ("emergency", &["This is urgent. Please tell me your room number and the nature of the emergency."]),
];

const SUPPORT_TL: ScriptSource = &[
    ("help", &["Nandito ako para tumulong! Ano ang kailangan mo?"]),
    ("problem", &["Pasensya na po. Sabihin mo sa akin ang problema at aayusin ko agad."]),
    ("housekeeping", &["Ipapadala ko agad ang housekeeping sa inyong kuwarto. Ano ang kailangan ninyo?"]),
    ("maintenance", &["Ipapadala ko agad ang maintenance team. Ano ang kailangang ayusin?"]),
    ("Pillows", &["Magpapadala ako ng bagong mga unan sa inyong kuwarto sa loob ng 10 minuto. Anong kuwarto kayo?"]),
    ("towels", &["Magpapadala ako ng fresh towels sa inyong kuwarto sa loob ng 10 minuto. Anong kuwarto kayo?"]),
    ("noise", &["Pasensya na sa abala. Aayusin ko ito agad. Anong kuwarto kayo?"]),
    ("emergency", &["Ito ay urgent. Pakisabi ang room number ninyo at ang kalikasan ng emergency."]),
];

const SUPPORT_ZH: ScriptSource = &[
    ("help", &["我在这里帮助您！您需要什么帮助？"]),
    ("problem", &["很抱歉听到这个。请告诉我问题是什么，我会立即解决。"]),
    ("housekeeping", &["我会立即派客房服务到您的房间。您需要什么？"]),
    ("maintenance", &["我会立即派遣我们的维修团队。需要修理什么？"]),
    ("towels", &["我会在10分钟内将干净的毛巾送到您的房间。"]),
    ("noise", &["对不起造成打扰。我会立即处理。您在哪个房间？"]),
    ("emergency", &["这很紧急。请告诉我您的房间号和紧急情况的性质。"]),
];

const SUPPORT_JA: ScriptSource = &[
    ("help", &["お手伝いします！何が必要ですか？"]),
    ("problem", &["申し訳ございません。問題を教えていただければ、すぐに解決いたします。"]),
    ("housekeeping", &["すぐにハウスキーピングをお部屋に送ります。何が必要ですか？"]),
    ("maintenance", &["すぐにメンテナンスチームを派遣します。何を修理する必要がありますか？"]),
    ("towels", &["10分以内に清潔なタオルをお部屋にお届けします。"]),
    ("noise", &["ご迷惑をおかけして申し訳ございません。すぐに対処します。お部屋は何号室ですか？"]),
    ("emergency", &["これは緊急です。お部屋番号と緊急事態の内容を教えてください。"]),
];

const SUPPORT_KO: ScriptSource = &[
    ("help", &["도와드리겠습니다! 무엇이 필요하신가요?"]),
    ("problem", &["죄송합니다. 문제가 무엇인지 말씀해 주시면 즉시 해결하겠습니다."]),
    ("housekeeping", &["즉시 객실 청소 서비스를 보내겠습니다. 무엇이 필요하신가요?"]),
    ("maintenance", &["즉시 유지보수팀을 보내겠습니다. 무엇을 수리해야 하나요?"]),
    ("towels", &["10분 이내에 깨끗한 수건을 객실로 배달하겠습니다."]),
    ("noise", &["방해를 드려 죄송합니다. 즉시 처리하겠습니다. 어느 방에 계신가요?"]),
    ("emergency", &["긴급 상황입니다. 객실 번호와 긴급 상황의 성격을 말씀해 주세요."]),
];
