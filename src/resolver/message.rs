use hickory_proto::op::{Header, Message, Query, ResponseCode};

use crate::rr::{AsHickory, DNSClass, Name, Record, RecordType};

/// A name and record type to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    name: Name,
    record_type: RecordType,
    dns_class: DNSClass,
}

impl Question {
    /// Create an `IN` class question.
    pub fn new(name: Name, record_type: RecordType) -> Self {
        Self::with_class(name, record_type, DNSClass::IN)
    }

    pub fn with_class(name: Name, record_type: RecordType, dns_class: DNSClass) -> Self {
        Self {
            name,
            record_type,
            dns_class,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn dns_class(&self) -> DNSClass {
        self.dns_class
    }
}

impl From<&Query> for Question {
    fn from(query: &Query) -> Self {
        Question {
            name: query.name().clone().into(),
            record_type: query.query_type(),
            dns_class: query.query_class(),
        }
    }
}

impl AsHickory for Question {
    type Hickory = Query;

    fn as_hickory(&self) -> Self::Hickory {
        let mut query = Query::query(self.name.clone().into(), self.record_type);
        query.set_query_class(self.dns_class);
        query
    }
}

/// A DNS request: a header and an ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    header: Header,
    questions: Vec<Question>,
}

impl Request {
    /// Create a request with no questions.
    pub fn new(id: u16) -> Self {
        let mut header = Header::new();
        header.set_id(id);
        Self {
            header,
            questions: Vec::new(),
        }
    }

    pub fn from_questions(id: u16, questions: impl IntoIterator<Item = Question>) -> Self {
        let mut request = Self::new(id);
        request.questions.extend(questions);
        request
    }

    pub fn add_question(&mut self, question: Question) -> &mut Self {
        self.questions.push(question);
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn id(&self) -> u16 {
        self.header.id()
    }
}

impl From<&Message> for Request {
    fn from(message: &Message) -> Self {
        Request {
            header: message.header().clone(),
            questions: message.queries().iter().map(Question::from).collect(),
        }
    }
}

impl From<Message> for Request {
    fn from(message: Message) -> Self {
        Request::from(&message)
    }
}

/// A DNS response under construction or ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    header: Header,
    questions: Vec<Question>,
    answers: Vec<Record>,
}

impl Response {
    /// An empty, successful response to `request`.
    ///
    /// The header echoes the request id, opcode and the recursion desired and
    /// checking disabled flags. The questions are echoed as well.
    pub fn from_request(request: &Request) -> Self {
        let mut header = Header::response_from_request(request.header());
        header.set_response_code(ResponseCode::NoError);

        Self {
            header,
            questions: request.questions().to_vec(),
            answers: Vec::new(),
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn id(&self) -> u16 {
        self.header.id()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn response_code(&self) -> ResponseCode {
        self.header.response_code()
    }

    pub fn set_response_code(&mut self, response_code: ResponseCode) -> &mut Self {
        self.header.set_response_code(response_code);
        self
    }

    pub fn is_success(&self) -> bool {
        self.response_code() == ResponseCode::NoError
    }

    pub fn answer_records(&self) -> &[Record] {
        &self.answers
    }

    pub fn add_answers(&mut self, answers: impl IntoIterator<Item = Record>) -> &mut Self {
        self.answers.extend(answers);
        self
    }
}

impl From<Response> for Message {
    fn from(response: Response) -> Self {
        let mut msg = Message::new();
        msg.set_header(response.header);
        msg.add_queries(response.questions.iter().map(|q| q.as_hickory()));
        msg.add_answers(response.answers.iter().map(|r| r.as_hickory()));

        // Manually update header counts to match the actual records
        let mut header = msg.header().clone();
        header.set_query_count(u16::try_from(msg.queries().len()).unwrap_or(u16::MAX));
        header.set_answer_count(u16::try_from(msg.answers().len()).unwrap_or(u16::MAX));
        msg.set_header(header);

        msg
    }
}
